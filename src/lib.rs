pub mod configuration;

pub mod function {
    pub mod function;
    pub mod functionerror;
    pub mod functions;

    pub mod basic {
        pub mod trigonometric;
        pub mod exponential;
        pub mod logarithm;
    }

    pub mod meta {
        pub mod arithmetic;
        pub mod transform;
    }
}

pub mod math {
    pub mod round;
}

pub mod tabulated {
    pub mod functionpoint;
    pub mod tabulatedfunction;
    pub mod arraytabulatedfunction;
    pub mod linkedlisttabulatedfunction;
    pub mod tabulatedfunctionfactory;
    pub mod tabulatedfunctions;
    pub mod tabulatedfunctionio;
}

pub mod threads {
    pub mod task;
    pub mod actorreport;
    pub mod cancellationtoken;
    pub mod semaphoreslot;
    pub mod simplegenerator;
    pub mod simpleintegrator;
    pub mod generator;
    pub mod integrator;
    pub mod launcher;
}
