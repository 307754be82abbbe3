mod carousel;
mod clip;
mod jumbotron;
mod navbar;
mod page;
mod status_bar;

pub use carousel::CarouselWidget;
pub use jumbotron::JumbotronWidget;
pub use navbar::NavbarWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
