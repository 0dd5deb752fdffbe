//! The taxonomy dataset. Leaf values are uniform so every theory gets an
//! equal angular share of its ring.

use super::TaxonomyNode;

fn leaves(names: &[&str]) -> Vec<TaxonomyNode> {
    names.iter().map(|n| TaxonomyNode::leaf(n)).collect()
}

fn branch(name: &str, names: &[&str]) -> TaxonomyNode {
    TaxonomyNode::branch(name, leaves(names))
}

/// Build a fresh copy of the full taxonomy tree.
pub fn base_taxonomy() -> Vec<TaxonomyNode> {
    vec![
        TaxonomyNode::branch(
            "Materialism",
            vec![
                branch(
                    "Philosophical",
                    &[
                        "Eliminative",
                        "Epiphenomenalism",
                        "Functionalism",
                        "Emergence",
                        "Mind-Brain",
                        "Searle",
                        "Block",
                        "Flanagan",
                        "Papineau",
                        "Goldstein",
                        "Hardcastle",
                        "Stoljar",
                    ],
                ),
                branch(
                    "Neurobiological",
                    &[
                        "Edelman",
                        "Crick-Koch",
                        "Baars-Dehaene",
                        "Dennett",
                        "Minsky",
                        "Graziano",
                        "Prinz",
                        "Sapolsky",
                        "Mitchell",
                        "Bach",
                        "Brain Circuits",
                        "Northoff",
                        "Bunge",
                        "Hirstein",
                    ],
                ),
                branch(
                    "Electromagnetic",
                    &["Jones", "Pockett", "McFadden", "Ephaptic", "Ambron", "Llinas", "Zhang"],
                ),
                branch(
                    "Computational",
                    &[
                        "Computational",
                        "Grossberg",
                        "Adaptive Systems",
                        "Critical Brain",
                        "Pribram",
                        "Doyle",
                        "Informational",
                        "Mathematical",
                    ],
                ),
                branch(
                    "Homeostatic",
                    &[
                        "Predictive",
                        "Seth",
                        "Damasio",
                        "Friston",
                        "Solms",
                        "Carhart-Harris",
                        "Buzsáki",
                        "Deacon",
                        "Pereira",
                        "Mansell",
                        "Projective",
                        "Pepperell",
                    ],
                ),
                branch(
                    "Embodied",
                    &[
                        "Embodied",
                        "Enactivism",
                        "Varela",
                        "Thompson",
                        "Frank-Gleiser",
                        "Bitbol",
                        "Direct Perception",
                        "Gibson",
                    ],
                ),
                branch(
                    "Relational",
                    &["A. Clark", "Noë", "Loorits", "Lahav", "Tsuchiya", "Jaworski", "Process"],
                ),
                branch(
                    "Representational",
                    &[
                        "First-Order",
                        "Lamme",
                        "Higher-Order",
                        "Lau",
                        "LeDoux",
                        "Humphrey",
                        "Metzinger",
                        "Jackson",
                        "Lycan",
                        "Transparency",
                        "Tye",
                        "Thagard",
                        "T. Clark",
                        "Deacon",
                    ],
                ),
                branch(
                    "Language",
                    &["Chomsky", "Searle", "Koch", "Smith", "Jaynes", "Parrington"],
                ),
                branch(
                    "Phylogenetic",
                    &[
                        "Dennett",
                        "LeDoux",
                        "Ginsburg-Jablonka",
                        "Cleeremans",
                        "Andrews",
                        "Reber",
                        "Feinberg-Mallatt",
                        "Levin",
                        "James",
                    ],
                ),
            ],
        ),
        branch(
            "Non-Reductive",
            &["Ellis", "Murphy", "van Inwagen", "Nagasawa", "Sanfey", "Northoff"],
        ),
        branch(
            "Quantum",
            &[
                "Penrose-Hameroff",
                "Stapp",
                "Bohm",
                "Pylkkänen",
                "Wolfram",
                "Beck-Eccles",
                "Kauffman",
                "Torday",
                "Smolin",
                "Carr",
                "Faggin",
                "Fisher",
                "Globus",
                "Poznanski",
                "Quantum Extensions",
                "Rovelli",
            ],
        ),
        branch("Integrated Info", &["Critiques", "Koch"]),
        branch(
            "Panpsychism",
            &[
                "Micropsychism",
                "Panprotopsychism",
                "Cosmopsychism",
                "Qualia Force",
                "Qualia Space",
                "Chalmers",
                "Strawson",
                "Goff",
                "A. Harris",
                "Sheldrake",
                "Wallace",
                "Whitehead",
            ],
        ),
        branch(
            "Monism",
            &[
                "Russellian",
                "Davidson",
                "Velmans",
                "Strawson",
                "Polkinghorne",
                "Teilhard",
                "Atmanspacher",
                "Ramachandran",
                "Tegmark",
                "QRI",
                "Bentley Hart",
                "Leslie",
            ],
        ),
        branch(
            "Dualism",
            &[
                "Property",
                "Traditional",
                "Swinburne",
                "Composite",
                "Stump",
                "Feser",
                "Moreland",
                "Interactive",
                "Emergent",
                "Kind",
                "Hebrew Soul",
                "Christian Soul",
                "Islamic Soul",
                "God-Supplied",
                "Indian",
                "Indigenous",
                "Soul Realms",
                "Theosophy",
                "Steiner",
                "Nonphysical",
            ],
        ),
        branch(
            "Idealism",
            &[
                "Indian",
                "Buddhism",
                "Dao",
                "Kastrup",
                "Hoffman",
                "McGilchrist",
                "Chopra",
                "Physical",
                "Goswami",
                "Spira",
                "Nader",
                "Ward",
                "Albahari",
                "Meijer",
                "Imaginative",
            ],
        ),
        branch(
            "Anomalous",
            &[
                "Bergson",
                "Jung",
                "Radin",
                "Tart",
                "Josephson",
                "Wilber",
                "Combs",
                "Schooler",
                "Sheldrake",
                "Grinberg",
                "Graboi",
                "NDE",
                "DOPS",
                "Bitbol",
                "Campbell",
                "Hiller",
                "Harp",
                "Swimme",
                "Langan",
                "Meditation",
                "Psychedelic",
            ],
        ),
        branch(
            "Challenge",
            &[
                "Nagel",
                "McGinn",
                "S. Harris",
                "Eagleman",
                "Tallis",
                "Nagasawa",
                "Musser",
                "Davies",
            ],
        ),
    ]
}
