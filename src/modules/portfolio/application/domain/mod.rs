pub mod content;
pub mod document;
pub mod layout;
pub mod section;
pub mod style;
pub mod validation;
pub mod view;

pub use content::SectionContent;
pub use document::{
    apply_default_gap, default_sections, normalize_portfolio_data, normalize_positions,
    PortfolioDocument, SectionEditError, StoredShape,
};
pub use layout::{auto_fit_height, normalize_layout, NormalizedLayout, Orientation, SectionLayout};
pub use section::{Section, SectionType};
pub use style::{normalize_background_style, NormalizedBackground, PageStyle, SectionStyle};
pub use validation::{
    parse_current_document, parse_portfolio_document, parse_section, parse_sections,
};
pub use view::PublicPortfolioView;
