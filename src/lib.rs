pub mod charts;
pub mod cli;
pub mod ctx;
pub mod estimates;
pub mod input;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod scores;
