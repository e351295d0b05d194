// Everything `error_chain!` creates: the Error, ErrorKind, ResultExt and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
use error_chain::*;

error_chain! {
    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("grid dimensions below the 2x2 minimum")
            display("grid dimensions {}x{} are below the 2x2 minimum", columns, rows)
        }
    }
}
