//! Request and response bodies exchanged with the AppTrust REST API.
pub(crate) mod application;
pub(crate) mod package;
pub(crate) mod version;
mod tests;

pub use application::{
    AppDescriptor, BUSINESS_CRITICALITY_UNSPECIFIED, BUSINESS_CRITICALITY_VALUES,
    MATURITY_LEVEL_UNSPECIFIED, MATURITY_LEVEL_VALUES,
};
pub use package::BindPackageRequest;
pub use version::{
    ArtifactProperty, CommonPromoteAppVersion, CreateAppVersionRequest, CreateVersionArtifact,
    CreateVersionBuild, CreateVersionPackage, CreateVersionReference, CreateVersionReleaseBundle,
    CreateVersionSources, PromoteAppVersionRequest, ReleaseAppVersionRequest,
    RollbackAppVersionRequest, RollbackAppVersionResponse, UpdateAppVersionRequest,
    OVERWRITE_STRATEGY_VALUES, PROMOTION_TYPE_COPY, PROMOTION_TYPE_DRY_RUN, PROMOTION_TYPE_KEEP,
    PROMOTION_TYPE_MOVE, PROMOTION_TYPE_VALUES,
};
