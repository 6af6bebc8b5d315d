mod proxy;
mod responses;
mod scenarios;
