pub mod portfolios;
