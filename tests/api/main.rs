mod health_check;
mod helpers;
mod login;
mod orders;
mod pages;
mod reviews;
mod widgets;
