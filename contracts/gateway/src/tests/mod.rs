mod admin_tests;
