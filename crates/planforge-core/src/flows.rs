//! The flow narrator.
//!
//! Produces ordered, plain-text narrations of the logical traffic patterns
//! a plan supports. Steps are appended in a fixed order and only for
//! components actually present in the plan, so a flow can never mention a
//! component the component list lacks.

use crate::model::plan::{ComponentId, FlowKind, PlanComponent, PlanFlow};
use crate::rules::FeatureFlags;

fn present(components: &[PlanComponent], id: ComponentId) -> bool {
    components.iter().any(|c| c.id == id)
}

/// Derive the flow list for a plan.
///
/// The request path always exists; upload, async, and telemetry paths are
/// emitted only when their anchor components are present.
pub fn derive_flows(components: &[PlanComponent], flags: &FeatureFlags) -> Vec<PlanFlow> {
    let mut flows = Vec::new();
    let has = |id| present(components, id);

    // Request path, always.
    {
        let mut steps: Vec<String> = Vec::new();
        if has(ComponentId::Waf) {
            steps.push("WAF evaluates the request against rate-limit and managed rule groups".into());
        }
        if has(ComponentId::Cdn) {
            steps.push("CloudFront checks the edge cache; a cache hit returns immediately".into());
        }
        if has(ComponentId::LoadBalancer) {
            steps.push("ALB terminates TLS and routes to a healthy compute target".into());
        } else if has(ComponentId::WebSocketApi) {
            steps.push("API Gateway upgrades HTTP to WebSocket (WSS)".into());
        }
        if has(ComponentId::Compute) {
            steps.push("Compute processes the request (Lambda / ECS Fargate)".into());
        }
        if has(ComponentId::RelationalDb) {
            steps.push("Relational DB query (RDS PostgreSQL)".into());
        }
        if has(ComponentId::Cache) {
            steps.push("Cache lookup on hot paths (Redis)".into());
        }
        if has(ComponentId::KeyValueStore) {
            steps.push("Key-value read/write (DynamoDB)".into());
        }
        steps.push("Response returned to the client (with CDN caching headers if applicable)".into());
        flows.push(PlanFlow { kind: FlowKind::Request, name: "Request path".into(), steps });
    }

    if has(ComponentId::ObjectStorage) {
        let mut steps: Vec<String> = vec![
            "Client requests a pre-signed S3 URL from compute".into(),
            "Compute generates and returns a time-limited S3 pre-signed URL".into(),
            "Client uploads the file directly to S3, bypassing compute".into(),
            "S3 event notification triggers compute (or Lambda) for post-processing".into(),
        ];
        if flags.has_adv_mon {
            steps.push("Upload metrics tracked in CloudWatch".into());
        }
        flows.push(PlanFlow { kind: FlowKind::Upload, name: "File upload path".into(), steps });
    }

    if has(ComponentId::Queue) && has(ComponentId::Worker) {
        let mut steps: Vec<String> = vec![
            "Compute enqueues a message on the SQS queue".into(),
            "SQS delivers the message to the worker via event-source mapping".into(),
            "Worker processes the task (DB writes, email, file processing)".into(),
            "On success the message is deleted from the queue".into(),
            "On failure the message lands in the DLQ after max retries".into(),
        ];
        if flags.has_adv_mon {
            steps.push("Queue depth and DLQ depth tracked in CloudWatch".into());
        }
        flows.push(PlanFlow { kind: FlowKind::Async, name: "Async job path".into(), steps });
    }

    if has(ComponentId::Monitoring) {
        let mut steps: Vec<String> = vec![
            "All services emit structured logs to CloudWatch Logs".into(),
            "CloudWatch Metrics collect service-level metrics (latency, errors, throughput)".into(),
        ];
        if flags.has_adv_mon {
            steps.push("X-Ray traces capture per-request spans across all services".into());
        }
        steps.push("CloudWatch Alarms trigger SNS notifications on threshold breach".into());
        if flags.has_adv_mon {
            steps.push("SLO burn-rate alerts fire before the error budget is exhausted".into());
        }
        flows.push(PlanFlow { kind: FlowKind::Telemetry, name: "Telemetry path".into(), steps });
    }

    flows
}
