//! Dashboard
//!
//! Section selection and the static composition of each section:
//!
//! - **section**: The closed set of views
//! - **state**: The view-state holder (active section)
//! - **router**: Section → layout mapping
//! - **layout**: Cards, panels, callouts and insight groups
//! - **card**: Summary cards and their HTML/text renderers
//!
//! # Flow
//!
//! ```text
//!   select_section(id) → ViewState → route(section) → Layout → renderer
//! ```

pub mod card;
pub mod layout;
pub mod router;
pub mod section;
pub mod state;

pub use card::{render_card_html, render_card_text, Accent, StatCard};
pub use layout::{Callout, Insight, InsightGroup, Layout, Panel, PanelContent, Tone};
pub use router::{route, route_id, HEADER_CARDS};
pub use section::{Section, UnknownSection};
pub use state::ViewState;
