mod cart_scenarios;
mod config_commands;
mod shop_session;
