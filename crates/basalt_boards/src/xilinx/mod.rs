//! Xilinx 7-series boards.
//!
//! The QMTech Kintex-7 core board and the "HPC FPGA Board Store" Kintex
//! 420T board, both programmed through an FT232 cable.

pub mod hpc_xc7k420t;
pub mod qmtech_xc7k325t;

pub use hpc_xc7k420t::{HpcXc7k420t, HpcXc7k420tConfig};
pub use qmtech_xc7k325t::{QmtechXc7k325t, QmtechXc7k325tConfig};
