use crate::pb::HealthRes;

/// Simple health service that can be used by both gRPC and REST APIs
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "rx interaction service is alive".into(),
        }
    }
}
