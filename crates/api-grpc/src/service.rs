// Re-export the proto module from the shared `api-shared` crate so callers
// can continue to reference `api_grpc::service::pb`.
pub use api_shared::pb;

use api_shared::convert::prescription_items;
use api_shared::{auth, HealthService};
use rx_core::{DrugId, InteractionService};
use std::sync::Arc;
use tonic::{Request, Response, Status};

use api_shared::pb::{
    interactions_server::Interactions, AssessPairReq, HealthRes, PairVerdict,
    SummarizePrescriptionReq, SummarizePrescriptionRes,
};

/// Builds an interceptor that checks the `x-api-key` header against `api_key`.
pub fn api_key_interceptor(
    api_key: String,
) -> impl FnMut(Request<()>) -> Result<Request<()>, Status> + Clone {
    let api_key: Arc<str> = api_key.into();
    move |req: Request<()>| {
        auth::check_metadata(req.metadata(), &api_key)?;
        Ok(req)
    }
}

#[derive(Clone)]
pub struct InteractionsService {
    service: InteractionService,
}

impl InteractionsService {
    pub fn new(service: InteractionService) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl Interactions for InteractionsService {
    async fn health(&self, _req: Request<()>) -> Result<Response<HealthRes>, Status> {
        Ok(Response::new(HealthService::check_health()))
    }

    async fn assess_pair(
        &self,
        req: Request<AssessPairReq>,
    ) -> Result<Response<PairVerdict>, Status> {
        let req = req.into_inner();
        let service = self.service.clone();
        let (drug_a, drug_b) = (DrugId(req.drug_a), DrugId(req.drug_b));

        let verdict = tokio::task::spawn_blocking(move || service.assess_pair(drug_a, drug_b))
            .await
            .map_err(|e| Status::internal(format!("Failed to assess pair: {}", e)))?;

        Ok(Response::new(verdict.into()))
    }

    async fn summarize_prescription(
        &self,
        req: Request<SummarizePrescriptionReq>,
    ) -> Result<Response<SummarizePrescriptionRes>, Status> {
        let items = prescription_items(req.into_inner());
        let service = self.service.clone();

        let summary = tokio::task::spawn_blocking(move || service.summarize_prescription(&items))
            .await
            .map_err(|e| Status::internal(format!("Failed to summarize prescription: {}", e)))?;

        Ok(Response::new(SummarizePrescriptionRes { summary }))
    }
}
