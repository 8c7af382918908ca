// Test modules for Contactbook
// Each module covers one area of the library; shared fakes live in helpers

mod helpers;

mod contacts_list_tests;
