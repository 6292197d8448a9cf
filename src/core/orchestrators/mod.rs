mod extraction_orchestrator;

pub use extraction_orchestrator::ExtractionOrchestrator;
