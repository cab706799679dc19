macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod matrix {
    define_strings! {
        ABOUT =
            "Concatenate per-sample gene count files into one count matrix \
            and drop genes with zero counts in every sample.";
        INPUT =
            "Tab-separated count files with `gene` and `count` columns. The \
            sample name of each file is its file name up to the first dot.";
        OUTPUT = "Path for the filtered count matrix (CSV).";
        TEMP =
            "Path for the unfiltered count matrix (CSV). The file is kept \
            after the run.";
        ALIGN =
            "How count files are lined up against the gene order of the first \
            file. `strict` requires identical gene order in every file, \
            `join` matches genes by id and fills missing genes with zero.";
    }
}

pub mod gene_ids {
    define_strings! {
        ABOUT =
            "Extract gene_id,gene_name pairs of `gene` features from a GTF \
            annotation.";
        INPUT = "GTF annotation file.";
        OUTPUT = "Path for the gene id table (CSV without header).";
    }
}

pub mod utils {
    define_strings! {
        VERBOSE = "Print debug messages.";
        QUIET = "Only print warnings and errors.";
    }
}
