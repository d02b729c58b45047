// Adapters layer: transport envelopes around the converter (API Gateway / Lambda).

pub mod http;
