use crate::experiment::Outcome;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

pub fn tabulate(outcomes: &[Outcome]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(20))),
            Col::new(Styles::default().with(MinWidth(20))),
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(16)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Distribution".into(),
                "Strategy".into(),
                "Average grade".into(),
                "Pass probability".into(),
            ],
        ));

    for outcome in outcomes {
        match outcome {
            Outcome::Invalid {
                distribution,
                error,
            } => {
                table.push_row(Row::new(
                    Styles::default().with(Separator(true)),
                    vec![
                        format!("{distribution}").into(),
                        Cell::new(Styles::default(), format!("invalid: {error}").into()),
                        "".into(),
                        "".into(),
                    ],
                ));
            }
            Outcome::Assessed {
                distribution,
                assessments,
            } => {
                for (index, assessed) in assessments.iter().enumerate() {
                    let styles = if index == 0 {
                        Styles::default().with(Separator(true))
                    } else {
                        Styles::default()
                    };
                    let label = if index == 0 {
                        format!("{distribution}")
                    } else {
                        String::new()
                    };
                    table.push_row(Row::new(
                        styles,
                        vec![
                            label.into(),
                            format!("{}", assessed.strategy).into(),
                            format!("{:.3}", assessed.assessment.average_grade()).into(),
                            format!("{:.6}", assessed.assessment.pass_probability()).into(),
                        ],
                    ));
                }
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::Assessment;
    use crate::distribution::{Distribution, InvalidDistribution};
    use crate::experiment::StrategyAssessment;
    use crate::strategy::{Guesser, Strategy};
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    #[test]
    fn tabulate_outcomes() {
        let outcomes = vec![
            Outcome::Invalid {
                distribution: Distribution::from([24, 25, 25, 25]),
                error: InvalidDistribution::WrongSum {
                    expected: 100,
                    actual: 99,
                },
            },
            Outcome::Assessed {
                distribution: Distribution::from([25, 25, 25, 25]),
                assessments: vec![
                    StrategyAssessment {
                        strategy: Strategy::Guess(Guesser::GuessCommon),
                        assessment: Assessment {
                            trials: 10,
                            total_grade: 250,
                            passes: 0,
                        },
                    },
                    StrategyAssessment {
                        strategy: Strategy::OracleCheat,
                        assessment: Assessment {
                            trials: 10,
                            total_grade: 1_000,
                            passes: 10,
                        },
                    },
                ],
            },
        ];
        let table = tabulate(&outcomes);
        assert_eq!(4, table.num_rows());
        assert_eq!(4, table.num_cols());

        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("[24, 25, 25, 25]"));
        assert!(rendered.contains("invalid: counts sum to 99, expected the exam length 100"));
        assert!(rendered.contains("GuessCommon"));
        assert!(rendered.contains("25.000"));
        assert!(rendered.contains("TrueCheater"));
        assert!(rendered.contains("1.000000"));
    }
}
