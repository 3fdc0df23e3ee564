mod theme;

pub use theme::{
    create_dark_theme, AppColors, DEFAULT_PADDING, DEFAULT_ROUNDING, DEFAULT_SPACING,
    SIDEBAR_WIDTH,
};
