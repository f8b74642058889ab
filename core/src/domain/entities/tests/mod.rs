mod verification_request_tests;
mod verification_tests;
