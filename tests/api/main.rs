// one test binary for all black-box tests, so that linking happens once
mod health_check;
mod helpers;
mod waitlist;
