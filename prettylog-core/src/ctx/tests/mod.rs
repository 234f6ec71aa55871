mod request_ctx_tests;
mod response_ctx_tests;
