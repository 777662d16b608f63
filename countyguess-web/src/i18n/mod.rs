mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_locale, set_locale};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
