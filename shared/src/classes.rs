/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX_CLS: &str = "ant-list";

/// Prefix of the grid primitive's column classes.
pub const COL_PREFIX_CLS: &str = "ant-col";

/// `base` followed by the caller's class, if any.
pub fn class_string(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

pub fn prefix_or_default(prefix: Option<&str>) -> &str {
    prefix.unwrap_or(DEFAULT_PREFIX_CLS)
}

/// Key of the `index`-th action entry of item `id`.
pub fn action_key(prefix: &str, id: u64, index: usize) -> String {
    format!("{}-item-action-{}-{}", prefix, id, index)
}
