use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GridError;

/// Width of the grid, in units.
pub const GRID_UNITS: u32 = 24;

/// Slot counts that divide the grid evenly.
pub const GRID_COLUMNS: [u32; 8] = [1, 2, 3, 4, 6, 8, 12, 24];

// ============================================================================
// Breakpoints
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Column,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Column,
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Column => "column",
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl FromStr for Breakpoint {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "column" => Ok(Breakpoint::Column),
            "xs" => Ok(Breakpoint::Xs),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Grid Table
// ============================================================================

/// Number of equal slots the list width is divided into, per breakpoint.
/// `None` or `0` means no rule at that breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGrid {
    #[serde(default)]
    pub gutter: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
    #[serde(default)]
    pub xs: Option<u32>,
    #[serde(default)]
    pub sm: Option<u32>,
    #[serde(default)]
    pub md: Option<u32>,
    #[serde(default)]
    pub lg: Option<u32>,
    #[serde(default)]
    pub xl: Option<u32>,
}

impl ListGrid {
    pub fn columns(column: u32) -> Self {
        Self {
            column: Some(column),
            ..Self::default()
        }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<u32> {
        match breakpoint {
            Breakpoint::Column => self.column,
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Checks every present slot count against [`GRID_COLUMNS`].
    pub fn validate(&self) -> Result<(), GridError> {
        for breakpoint in Breakpoint::ALL {
            if let Some(slots) = self.get(breakpoint) {
                if slots != 0 && !GRID_COLUMNS.contains(&slots) {
                    return Err(GridError::InvalidSlotCount { breakpoint, slots });
                }
            }
        }
        Ok(())
    }

    /// Column span per breakpoint. Out-of-set slot counts are not rejected;
    /// they are logged and run through the same formula.
    pub fn spans(&self) -> GridSpans {
        if let Err(err) = self.validate() {
            log::warn!("{}", err);
        }
        GridSpans {
            span: column_span(self.column),
            xs: column_span(self.xs),
            sm: column_span(self.sm),
            md: column_span(self.md),
            lg: column_span(self.lg),
            xl: column_span(self.xl),
        }
    }
}

/// `floor(24 / slots)` for a non-zero slot count.
pub fn column_span(slots: Option<u32>) -> Option<u32> {
    slots.filter(|s| *s != 0).map(|s| GRID_UNITS / s)
}

// ============================================================================
// Column Spans
// ============================================================================

/// What the grid primitive is told: `span` for the default breakpoint and
/// one value per responsive breakpoint, `None` meaning unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpans {
    pub span: Option<u32>,
    pub xs: Option<u32>,
    pub sm: Option<u32>,
    pub md: Option<u32>,
    pub lg: Option<u32>,
    pub xl: Option<u32>,
}

impl GridSpans {
    pub fn get(&self, breakpoint: Breakpoint) -> Option<u32> {
        match breakpoint {
            Breakpoint::Column => self.span,
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Column classes for the grid primitive, e.g. `ant-col-6 ant-col-md-8`.
    pub fn col_classes(&self, col_prefix: &str) -> Vec<String> {
        Breakpoint::ALL
            .iter()
            .filter_map(|bp| {
                self.get(*bp).map(|span| match bp {
                    Breakpoint::Column => format!("{}-{}", col_prefix, span),
                    _ => format!("{}-{}-{}", col_prefix, bp.as_str(), span),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_span_for_allowed_slot_counts() {
        for slots in GRID_COLUMNS {
            assert_eq!(column_span(Some(slots)), Some(24 / slots));
        }
        assert_eq!(column_span(Some(3)), Some(8));
        assert_eq!(column_span(Some(6)), Some(4));
        assert_eq!(column_span(Some(24)), Some(1));
    }

    #[test]
    fn test_column_span_absent_or_zero() {
        assert_eq!(column_span(None), None);
        assert_eq!(column_span(Some(0)), None);
    }

    #[test]
    fn test_column_span_out_of_set_uses_formula() {
        assert_eq!(column_span(Some(5)), Some(4));
        assert_eq!(column_span(Some(48)), Some(0));
    }

    #[test]
    fn test_spans_only_column() {
        let spans = ListGrid::columns(4).spans();
        assert_eq!(spans.span, Some(6));
        assert_eq!(spans.xs, None);
        assert_eq!(spans.sm, None);
        assert_eq!(spans.md, None);
        assert_eq!(spans.lg, None);
        assert_eq!(spans.xl, None);
    }

    #[test]
    fn test_spans_every_breakpoint() {
        let grid = ListGrid {
            gutter: Some(16),
            column: Some(4),
            xs: Some(1),
            sm: Some(2),
            md: Some(3),
            lg: Some(6),
            xl: Some(0),
        };
        let spans = grid.spans();
        assert_eq!(spans.get(Breakpoint::Column), Some(6));
        assert_eq!(spans.get(Breakpoint::Xs), Some(24));
        assert_eq!(spans.get(Breakpoint::Sm), Some(12));
        assert_eq!(spans.get(Breakpoint::Md), Some(8));
        assert_eq!(spans.get(Breakpoint::Lg), Some(4));
        assert_eq!(spans.get(Breakpoint::Xl), None);
    }

    #[test]
    fn test_validate() {
        assert!(ListGrid::columns(8).validate().is_ok());
        assert!(ListGrid::columns(0).validate().is_ok());
        assert!(ListGrid::default().validate().is_ok());

        let grid = ListGrid {
            md: Some(5),
            ..ListGrid::default()
        };
        assert_eq!(
            grid.validate(),
            Err(GridError::InvalidSlotCount {
                breakpoint: Breakpoint::Md,
                slots: 5,
            })
        );
        let message = grid.validate().unwrap_err().to_string();
        assert!(message.contains("'md'"));
        assert!(message.contains('5'));
    }

    #[test]
    fn test_breakpoint_from_str() {
        assert_eq!("column".parse(), Ok(Breakpoint::Column));
        assert_eq!("XS".parse(), Ok(Breakpoint::Xs));
        assert_eq!("Lg".parse(), Ok(Breakpoint::Lg));
        assert!("xxl".parse::<Breakpoint>().is_err());
        for bp in Breakpoint::ALL {
            assert_eq!(bp.as_str().parse(), Ok(bp));
        }
    }

    #[test]
    fn test_grid_deserialize() {
        let grid: ListGrid = serde_json::from_str(r#"{"column": 3, "md": 2}"#).unwrap();
        assert_eq!(grid.column, Some(3));
        assert_eq!(grid.md, Some(2));
        assert_eq!(grid.xs, None);
        assert_eq!(grid.gutter, None);
    }

    #[test]
    fn test_col_classes() {
        let spans = GridSpans {
            span: Some(6),
            md: Some(8),
            ..GridSpans::default()
        };
        assert_eq!(spans.col_classes("ant-col"), vec!["ant-col-6", "ant-col-md-8"]);
        assert!(GridSpans::default().col_classes("ant-col").is_empty());
    }
}
