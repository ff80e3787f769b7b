pub mod ops_reveal;
