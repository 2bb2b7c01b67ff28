mod test_http;
