//! XML navigation primitives.

mod utils;

pub use utils::{
    get_all_descendants, get_optional_text, get_required_child, get_tag_name, get_text,
    get_unique_child, has_tag,
};
