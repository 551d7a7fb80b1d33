pub mod rule_server;
