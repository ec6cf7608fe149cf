// Domain layer: core models, ports (interfaces) and the user-facing message catalog.

pub mod messages;
pub mod model;
pub mod ports;
