//! One async function per AppTrust REST operation.
//!
//! Each function sends a single request through an [`ApptrustHttpClient`],
//! checks the status code the operation expects and prints the response body.
pub(crate) mod applications;
pub(crate) mod packages;
pub(crate) mod system;
pub(crate) mod versions;

pub use applications::{create_application, delete_application, update_application};
pub use packages::{bind_package, unbind_package};
pub use system::ping;
pub use versions::{
    create_app_version, delete_app_version, promote_app_version, release_app_version,
    rollback_app_version, update_app_version,
};

use crate::error::{AppTrustError, Result};
use crate::http::HttpResponse;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_ACCEPTED: u16 = 202;
pub const STATUS_NO_CONTENT: u16 = 204;

/// Fails with the status code and body unless the response carries `expected`.
pub(crate) fn expect_status(
    response: &HttpResponse,
    operation: &'static str,
    expected: u16,
) -> Result<()> {
    if response.status == expected {
        return Ok(());
    }
    Err(AppTrustError::Status {
        operation,
        status: response.status,
        body: response.text(),
    })
}

/// `async=false` for synchronous calls, `async=true` otherwise.
pub(crate) fn async_param(sync: bool) -> [(&'static str, String); 1] {
    [("async", (!sync).to_string())]
}

/// Status accepted by the long-running operations.
pub(crate) fn sync_status(sync: bool, sync_status: u16) -> u16 {
    if sync {
        sync_status
    } else {
        STATUS_ACCEPTED
    }
}

/// Writes a response body to stdout, the output channel of the CLI.
pub(crate) fn output(response: &HttpResponse) {
    if !response.body.is_empty() {
        println!("{}", response.text());
    }
}
