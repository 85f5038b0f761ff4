mod test_error;

mod application {
    mod test_auth;
    mod test_client;
}

mod model {
    mod test_config;
    mod test_identifier;
    mod test_requests;
}

mod utils {
    mod test_config;
    mod test_logger;
}
