// Landing page sections

/// Company name used across the landing page (single source of truth)
pub const COMPANY: &str = "Equip Noc";
/// Contact address for the CTA band
pub const CONTACT_EMAIL: &str = "info@equip-noc.com";

mod contact;
mod footer;
mod hero;
mod nav;
mod solutions;

pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use solutions::Solutions;
