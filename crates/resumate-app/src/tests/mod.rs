mod analyze_tests;
mod support;
