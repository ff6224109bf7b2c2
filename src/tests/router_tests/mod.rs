mod home_tests;
mod moderation_tests;
mod pages_tests;
mod submit_tests;
