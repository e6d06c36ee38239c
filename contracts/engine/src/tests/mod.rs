mod execute_tests;
