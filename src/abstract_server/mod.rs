mod remote_server;
mod server_interface;

pub use remote_server::make_remote_server;
pub use server_interface::{
    ErrorDetails, ErrorLayer, Result, SearchRequest, ServerError, TreemapServer,
};
