use opentelemetry::{
    global,
    trace::{SamplingDecision, SamplingResult, TraceContextExt, TraceState, TracerProvider as _},
    KeyValue,
};
use opentelemetry_otlp::{Protocol, WithExportConfig};
use opentelemetry_sdk::{
    metrics::{MeterProviderBuilder, PeriodicReader, SdkMeterProvider},
    trace::{RandomIdGenerator, SdkTracerProvider, ShouldSample},
    Resource,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "tts-audio-proxy";

/// Sampler that drops liveness-probe spans; they fire constantly and carry
/// no signal.
#[derive(Debug, Clone)]
struct ProbeFilterSampler;

impl ShouldSample for ProbeFilterSampler {
    fn should_sample(
        &self,
        parent_context: Option<&opentelemetry::Context>,
        _trace_id: opentelemetry::TraceId,
        name: &str,
        _span_kind: &opentelemetry::trace::SpanKind,
        _attributes: &[KeyValue],
        _links: &[opentelemetry::trace::Link],
    ) -> SamplingResult {
        let decision = if name == "health_check" {
            SamplingDecision::Drop
        } else {
            SamplingDecision::RecordAndSample
        };

        SamplingResult {
            decision,
            attributes: vec![],
            trace_state: match parent_context {
                Some(ctx) => ctx.span().span_context().trace_state().clone(),
                None => TraceState::default(),
            },
        }
    }
}

fn resource() -> Resource {
    Resource::builder().with_service_name(SERVICE_NAME).build()
}

fn build_meter_provider(url: &str) -> SdkMeterProvider {
    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_http()
        .with_endpoint(url)
        .with_protocol(Protocol::HttpBinary)
        .with_temporality(opentelemetry_sdk::metrics::Temporality::default())
        .build()
        .expect("failed to build OTLP metric exporter");

    let otlp_reader = PeriodicReader::builder(exporter)
        .with_interval(std::time::Duration::from_secs(5))
        .build();
    let stdout_reader =
        PeriodicReader::builder(opentelemetry_stdout::MetricExporter::default()).build();

    let provider = MeterProviderBuilder::default()
        .with_resource(resource())
        .with_reader(otlp_reader)
        .with_reader(stdout_reader)
        .build();
    global::set_meter_provider(provider.clone());

    provider
}

fn build_tracer_provider(url: &str) -> SdkTracerProvider {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(url)
        .with_protocol(Protocol::HttpBinary)
        .build()
        .expect("failed to build OTLP span exporter");

    SdkTracerProvider::builder()
        .with_sampler(ProbeFilterSampler)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource())
        .with_batch_exporter(exporter)
        .build()
}

/// Initialize the tracing subscriber, exporting to an OTLP collector when an
/// endpoint is configured. The returned guard keeps the providers alive for
/// the lifetime of the process.
pub fn init_tracing_subscriber(otel_http_url: &Option<String>) -> OtelGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tts_audio_proxy=info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    match otel_http_url {
        Some(url) => {
            let tracer_provider = build_tracer_provider(url);
            let meter_provider = build_meter_provider(url);
            let tracer = tracer_provider.tracer(SERVICE_NAME);

            registry
                .with(tracing_opentelemetry::MetricsLayer::new(meter_provider.clone()))
                .with(tracing_opentelemetry::OpenTelemetryLayer::new(tracer))
                .init();

            OtelGuard {
                _tracer_provider: Some(tracer_provider),
                _meter_provider: Some(meter_provider),
            }
        }
        None => {
            registry.init();

            OtelGuard {
                _tracer_provider: None,
                _meter_provider: None,
            }
        }
    }
}

pub struct OtelGuard {
    _tracer_provider: Option<SdkTracerProvider>,
    _meter_provider: Option<SdkMeterProvider>,
}
