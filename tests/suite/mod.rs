mod cart_workflow;
mod checkout;
mod config;
mod keyboard;
mod provisioning;
