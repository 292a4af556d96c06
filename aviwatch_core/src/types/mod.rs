mod feature;
mod lat_lng;
mod path_decoration;
mod spacing;
mod visible_set;

pub use feature::*;
pub use lat_lng::*;
pub use path_decoration::*;
pub use spacing::*;
pub use visible_set::*;
