mod car;
mod order;
mod user;
