mod liked_tests;
mod search_tests;
mod site_tests;
