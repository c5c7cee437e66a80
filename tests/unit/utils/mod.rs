mod test_config;
mod test_cookie;
