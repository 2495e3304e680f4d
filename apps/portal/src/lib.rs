pub mod controller;
pub mod view;

pub use controller::{PageController, PageEvent, PageState};
pub use view::{Feedback, ModalView, PageView};
