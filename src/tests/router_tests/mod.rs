mod detail_tests;
mod home_tests;
mod refresh_tests;
