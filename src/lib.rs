pub mod bench {
    pub mod benchmarkconfiguration;
    pub mod benchmarkrecord;
    pub mod benchmarkrunner;
}

pub mod ffi;

pub mod kernel {
    pub mod kernelerror;
    pub mod kernel;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod factorial;
    pub mod integration;
}
