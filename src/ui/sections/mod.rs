//! Landing page sections, top to bottom

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod process;
pub mod products;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use process::Process;
pub use products::ProductsSection;
