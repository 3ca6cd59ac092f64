/// Page declaration, reactive bindings and the HTTP surface.
pub mod binding;
pub mod layout;
pub mod server;
