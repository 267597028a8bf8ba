//! 一覧画面の Model/Msg/update/view
//!
//! カタログ順のレコードを行へ射影する。副作用は持たず、アクションの
//! 実行要求は UpdateEffect として呼び出し側へ返す。

mod model;
mod update;
mod view;

// Re-exports
pub use model::{key_to_msg, Model, Msg, UpdateEffect};
pub use update::update;
pub use view::view;
