pub(crate) const ANIMALS: &[&str] = &[
    "Badger", "Beaver", "Bison", "Camel", "Cheetah", "Cobra", "Coyote", "Crane", "Dingo",
    "Dolphin", "Eagle", "Elk", "Falcon", "Ferret", "Gecko", "Gibbon", "Heron", "Hyena", "Ibis",
    "Jackal", "Koala", "Lemur", "Lynx", "Marmot", "Moose", "Newt", "Otter", "Panda", "Puffin",
    "Quail", "Raven", "Salmon", "Tapir", "Toucan", "Walrus", "Wombat", "Yak", "Zebra",
];

pub(crate) const COLORS: &[&str] = &[
    "Amber", "Azure", "Beige", "Coral", "Crimson", "Cyan", "Denim", "Emerald", "Fuchsia", "Gold",
    "Indigo", "Ivory", "Jade", "Khaki", "Lavender", "Lilac", "Magenta", "Maroon", "Mint", "Navy",
    "Ochre", "Olive", "Peach", "Plum", "Ruby", "Saffron", "Scarlet", "Sepia", "Silver", "Teal",
    "Turquoise", "Umber", "Violet",
];
