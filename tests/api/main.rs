mod contact;
mod contact_form;
mod helper;
mod pages;
