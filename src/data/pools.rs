//! Built-in question pools, five questions per category.

use std::collections::BTreeMap;

use crate::models::Question;

type Entry = (&'static str, &'static [&'static str], &'static str);

const POOLS: &[(&str, &[Entry])] = &[
    (
        "jhs-mathematics",
        &[
            (
                "What is the value of x in the equation 2x + 5 = 15?",
                &["3", "5", "7", "10"],
                "5",
            ),
            (
                "What is the area of a rectangle with length 8 cm and width 4 cm?",
                &["12 cm²", "16 cm²", "24 cm²", "32 cm²"],
                "32 cm²",
            ),
            (
                "If a triangle has angles measuring 30° and 60°, what is the measure of the third angle?",
                &["30°", "60°", "90°", "120°"],
                "90°",
            ),
            (
                "What is the perimeter of a square with sides of length 7 cm?",
                &["14 cm", "21 cm", "28 cm", "49 cm"],
                "28 cm",
            ),
            (
                "Which of the following is not a prime number?",
                &["11", "13", "15", "17"],
                "15",
            ),
        ],
    ),
    (
        "jhs-science",
        &[
            (
                "Which of the following is NOT a state of matter?",
                &["Solid", "Liquid", "Gas", "Energy"],
                "Energy",
            ),
            (
                "What is the chemical symbol for water?",
                &["H2O", "CO2", "O2", "NaCl"],
                "H2O",
            ),
            (
                "Which of the following is an example of a physical change?",
                &[
                    "Rusting of iron",
                    "Burning of paper",
                    "Freezing water",
                    "Digesting food",
                ],
                "Freezing water",
            ),
            (
                "What is the main function of the respiratory system?",
                &[
                    "To pump blood",
                    "To digest food",
                    "To exchange gases",
                    "To filter waste",
                ],
                "To exchange gases",
            ),
            (
                "What is the closest planet to the sun?",
                &["Venus", "Earth", "Mars", "Mercury"],
                "Mercury",
            ),
        ],
    ),
    (
        "jhs-english",
        &[
            (
                "Which of the following is a proper noun?",
                &["Car", "Tree", "Paris", "Book"],
                "Paris",
            ),
            (
                "Which sentence uses correct punctuation?",
                &[
                    "The movie was great I loved it.",
                    "The movie was great, I loved it.",
                    "The movie was great; I loved it.",
                    "The movie was great: I loved it.",
                ],
                "The movie was great; I loved it.",
            ),
            (
                "Which word is an adverb in the sentence: 'She sang beautifully at the concert.'?",
                &["She", "sang", "beautifully", "concert"],
                "beautifully",
            ),
            (
                "What is the past tense of 'swim'?",
                &["Swimmed", "Swam", "Swimming", "Swum"],
                "Swam",
            ),
            (
                "Which of these is a compound sentence?",
                &[
                    "The cat slept on the couch.",
                    "I ate dinner and watched TV.",
                    "After finishing homework, I went to bed.",
                    "Running quickly, the boy caught the bus.",
                ],
                "I ate dinner and watched TV.",
            ),
        ],
    ),
    (
        "jhs-social-studies",
        &[
            (
                "What are the four cardinal directions?",
                &[
                    "Up, down, left, right",
                    "North, south, east, west",
                    "Front, back, left, right",
                    "Vertical, horizontal, diagonal, curved",
                ],
                "North, south, east, west",
            ),
            (
                "Which of these is NOT a branch of government in most democracies?",
                &["Executive", "Legislative", "Judicial", "Corporate"],
                "Corporate",
            ),
            (
                "What is a renewable resource?",
                &["Coal", "Natural gas", "Solar energy", "Oil"],
                "Solar energy",
            ),
            (
                "Which continent is the largest by land area?",
                &["North America", "Africa", "Europe", "Asia"],
                "Asia",
            ),
            (
                "What do we call a person who studies history?",
                &[
                    "Geologist",
                    "Archaeologist",
                    "Historian",
                    "Anthropologist",
                ],
                "Historian",
            ),
        ],
    ),
    (
        "shs-mathematics",
        &[
            (
                "What is the derivative of f(x) = 3x² + 2x - 5?",
                &[
                    "f'(x) = 3x + 2",
                    "f'(x) = 6x + 2",
                    "f'(x) = 6x² + 2",
                    "f'(x) = 6x - 5",
                ],
                "f'(x) = 6x + 2",
            ),
            (
                "What is the solution to the equation log₂(x) = 3?",
                &["x = 3", "x = 6", "x = 8", "x = 16"],
                "x = 8",
            ),
            (
                "In a right triangle, if one angle is 30°, what is the other acute angle?",
                &["30°", "45°", "60°", "90°"],
                "60°",
            ),
            (
                "What is the value of sin(90°)?",
                &["0", "1", "-1", "Undefined"],
                "1",
            ),
            (
                "What is the domain of the function f(x) = 1/(x-2)?",
                &[
                    "All real numbers",
                    "All real numbers except x = 0",
                    "All real numbers except x = 2",
                    "All positive numbers",
                ],
                "All real numbers except x = 2",
            ),
        ],
    ),
    (
        "shs-science",
        &[
            (
                "What is Newton's Second Law of Motion?",
                &[
                    "F = ma",
                    "For every action, there is an equal and opposite reaction",
                    "An object at rest stays at rest",
                    "Energy cannot be created or destroyed",
                ],
                "F = ma",
            ),
            (
                "Which of the following is the correct formula for photosynthesis?",
                &[
                    "6CO2 + 6H2O → C6H12O6 + 6O2",
                    "C6H12O6 + 6O2 → 6CO2 + 6H2O",
                    "6CO2 + 12H2O → C6H12O6 + 6O2 + 6H2O",
                    "C6H12O6 → 6CO2 + 6H2O",
                ],
                "6CO2 + 6H2O → C6H12O6 + 6O2",
            ),
            (
                "What is the pH of a neutral solution?",
                &["0", "7", "10", "14"],
                "7",
            ),
            (
                "Which of the following is NOT a type of chemical bond?",
                &[
                    "Ionic bond",
                    "Covalent bond",
                    "Hydrogen bond",
                    "Gravitational bond",
                ],
                "Gravitational bond",
            ),
            (
                "What is the atomic number of carbon?",
                &["2", "6", "12", "14"],
                "6",
            ),
        ],
    ),
    (
        "shs-english",
        &[
            (
                "Who wrote 'Romeo and Juliet'?",
                &[
                    "Charles Dickens",
                    "Jane Austen",
                    "William Shakespeare",
                    "Mark Twain",
                ],
                "William Shakespeare",
            ),
            (
                "Which literary device involves comparing two unlike things using 'like' or 'as'?",
                &["Metaphor", "Simile", "Personification", "Alliteration"],
                "Simile",
            ),
            (
                "What is the main conflict type in 'The Great Gatsby'?",
                &[
                    "Man vs. Man",
                    "Man vs. Nature",
                    "Man vs. Society",
                    "Man vs. Self",
                ],
                "Man vs. Society",
            ),
            (
                "What is the term for a word that is opposite in meaning to another word?",
                &["Synonym", "Antonym", "Homonym", "Acronym"],
                "Antonym",
            ),
            (
                "Which of these is an example of irony?",
                &[
                    "A fire station burning down",
                    "Rain falling during a funeral",
                    "A student failing an exam",
                    "A car getting a flat tire",
                ],
                "A fire station burning down",
            ),
        ],
    ),
    (
        "shs-history",
        &[
            (
                "In which year did World War II end?",
                &["1943", "1945", "1947", "1950"],
                "1945",
            ),
            (
                "Who was the first President of the United States?",
                &[
                    "Thomas Jefferson",
                    "John Adams",
                    "George Washington",
                    "Benjamin Franklin",
                ],
                "George Washington",
            ),
            (
                "What event marked the beginning of World War I?",
                &[
                    "The invasion of Poland",
                    "The assassination of Archduke Franz Ferdinand",
                    "The bombing of Pearl Harbor",
                    "The Russian Revolution",
                ],
                "The assassination of Archduke Franz Ferdinand",
            ),
            (
                "Which empire was ruled by Genghis Khan?",
                &[
                    "Ottoman Empire",
                    "Mongol Empire",
                    "Roman Empire",
                    "Byzantine Empire",
                ],
                "Mongol Empire",
            ),
            (
                "The Renaissance period began in which country?",
                &["France", "England", "Italy", "Germany"],
                "Italy",
            ),
        ],
    ),
    (
        "shs-languages",
        &[
            (
                "Which language has the most native speakers in the world?",
                &["English", "Spanish", "Mandarin Chinese", "Hindi"],
                "Mandarin Chinese",
            ),
            (
                "What is the most common verb tense in French?",
                &["Present", "Past", "Future", "Conditional"],
                "Present",
            ),
            (
                "Which language uses the Cyrillic alphabet?",
                &["Greek", "Arabic", "Russian", "Hebrew"],
                "Russian",
            ),
            (
                "In Spanish, which of the following is feminine?",
                &[
                    "El libro (book)",
                    "El coche (car)",
                    "La mesa (table)",
                    "El sol (sun)",
                ],
                "La mesa (table)",
            ),
            (
                "What is the meaning of 'Guten Tag' in German?",
                &[
                    "Good morning",
                    "Good afternoon",
                    "Good evening",
                    "Good night",
                ],
                "Good afternoon",
            ),
        ],
    ),
    (
        "shs-arts",
        &[
            (
                "Who painted 'Starry Night'?",
                &[
                    "Pablo Picasso",
                    "Claude Monet",
                    "Vincent van Gogh",
                    "Leonardo da Vinci",
                ],
                "Vincent van Gogh",
            ),
            (
                "Which of these is a Renaissance artist?",
                &[
                    "Andy Warhol",
                    "Salvador Dalí",
                    "Michelangelo",
                    "Jackson Pollock",
                ],
                "Michelangelo",
            ),
            (
                "What art movement is characterized by dream-like scenes and illogical juxtapositions?",
                &["Impressionism", "Cubism", "Surrealism", "Pop Art"],
                "Surrealism",
            ),
            (
                "In music, what does 'fortissimo' mean?",
                &[
                    "Very soft",
                    "Moderately loud",
                    "Very loud",
                    "Gradually getting louder",
                ],
                "Very loud",
            ),
            (
                "Which musical instrument is known as the 'King of Instruments'?",
                &["Piano", "Violin", "Organ", "Trumpet"],
                "Organ",
            ),
        ],
    ),
];

pub fn builtin_pools() -> BTreeMap<String, Vec<Question>> {
    POOLS
        .iter()
        .map(|(category, entries)| {
            let questions = entries
                .iter()
                .map(|(text, options, correct)| {
                    Question::new(*text, options.iter().copied(), *correct)
                })
                .collect();
            (category.to_string(), questions)
        })
        .collect()
}
