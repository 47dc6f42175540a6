/*!
# IO utilities

Chunked corpus reading and tabular artifact writing.

Readers stream bounded batches so that peak memory stays at one chunk plus
the running count table. Writers only persist complete artifacts: a failed
run leaves no output file behind.
!*/
pub mod reader;
pub mod writer;
