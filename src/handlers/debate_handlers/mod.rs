//! Debate record workflow: drill-down listing, detail editing, save,
//! delete, and the merge-with-next-record operation.

mod delete;
mod detail;
mod list;
mod merge;
mod update;

pub use delete::delete;
pub use detail::detail;
pub use list::list;
pub use merge::{merge_page, merge_submit};
pub use update::update;
