// Browser-side tests; run with `wasm-pack test --headless --chrome`.
mod api_requests;
