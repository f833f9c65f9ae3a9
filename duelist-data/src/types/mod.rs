mod type_chart;
mod r#type;

pub use r#type::*;
pub use type_chart::*;
