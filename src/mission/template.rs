use super::origin::MazeOrigin;

/// Length and width of every maze in blocks.
pub const MAZE_SIZE: u32 = 16;
/// Wall height of every maze in blocks.
pub const MAZE_HEIGHT: u32 = 8;
/// Mission time limit enforced by the host.
pub const MISSION_TIME_LIMIT_MS: u32 = 1000;

/// One tiny-maze mission as handed to the host.
///
/// The document text is fully determined by `seed`, `origin` and
/// `iteration`; rendering it has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMission {
    seed: u64,
    origin: MazeOrigin,
    iteration: u64,
    validate: bool,
}

impl MazeMission {
    pub fn new(seed: u64, origin: MazeOrigin, iteration: u64) -> Self {
        Self { seed, origin, iteration, validate: true }
    }

    /// Builds the mission of quilt iteration `iteration`, seeded with the iteration itself.
    pub fn for_iteration(iteration: u64) -> Self {
        Self::new(iteration, MazeOrigin::for_iteration(iteration), iteration)
    }

    /// Whether the host should check the document against its schema before running it.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn seed(&self) -> u64 { self.seed }
    pub fn origin(&self) -> MazeOrigin { self.origin }
    pub fn iteration(&self) -> u64 { self.iteration }
    pub fn validate(&self) -> bool { self.validate }

    pub fn xml(&self) -> String {
        mission_xml(self.seed, self.origin, self.iteration)
    }
}

/// Renders the mission document for a single maze.
pub fn mission_xml(seed: u64, origin: MazeOrigin, iteration: u64) -> String {
    let (x, y, z) = (origin.x(), origin.y(), origin.z());
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<Mission xmlns="http://ProjectMalmo.microsoft.com" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://ProjectMalmo.microsoft.com Mission.xsd">
    <About>
        <Summary>Tiny Maze #{iteration}</Summary>
    </About>

    <ServerSection>
        <ServerInitialConditions>
            <Time>
                <StartTime>14000</StartTime>
                <AllowPassageOfTime>true</AllowPassageOfTime>
            </Time>
        </ServerInitialConditions>
        <ServerHandlers>
            <FlatWorldGenerator generatorString="3;7,220*1,5*3,2;3;,biome_1" />
            <MazeDecorator>
                <SizeAndPosition length="{MAZE_SIZE}" width="{MAZE_SIZE}" xOrigin="{x}" yOrigin="{y}" zOrigin="{z}" height="{MAZE_HEIGHT}"/>
                <GapProbability variance="0.4">0.5</GapProbability>
                <Seed>{seed}</Seed>
                <MaterialSeed>random</MaterialSeed>
                <AllowDiagonalMovement>false</AllowDiagonalMovement>
                <StartBlock fixedToEdge="true" type="emerald_block" height="1"/>
                <EndBlock fixedToEdge="true" type="redstone_block" height="{MAZE_HEIGHT}"/>
                <PathBlock type="glowstone stained_glass dirt" colour="WHITE ORANGE MAGENTA LIGHT_BLUE YELLOW LIME PINK GRAY SILVER CYAN PURPLE BLUE BROWN GREEN RED BLACK" height="1"/>
                <FloorBlock type="stone"/>
                <SubgoalBlock type="beacon sea_lantern glowstone"/>
                <OptimalPathBlock type="dirt grass snow"/>
                <GapBlock type="stained_hardened_clay lapis_ore sponge air" colour="WHITE ORANGE MAGENTA LIGHT_BLUE YELLOW LIME PINK GRAY SILVER CYAN PURPLE BLUE BROWN GREEN RED BLACK" height="3" heightVariance="3"/>
                <Waypoints quantity="10">
                    <WaypointItem>cookie</WaypointItem>
                </Waypoints>
            </MazeDecorator>
        </ServerHandlers>
    </ServerSection>

    <AgentSection mode="Survival">
        <Name>James Bond</Name>
        <AgentStart>
            <Placement x="-204" y="81" z="217"/>
        </AgentStart>
        <AgentHandlers>
            <ObservationFromMazeOptimalPath />
            <ContinuousMovementCommands turnSpeedDegs="840">
                <ModifierList type="deny-list">
                    <command>strafe</command>
                </ModifierList>
            </ContinuousMovementCommands>
            <VideoProducer>
                <Width>320</Width>
                <Height>240</Height>
            </VideoProducer>
            <AgentQuitFromTouchingBlockType>
                <Block type="redstone_block" />
            </AgentQuitFromTouchingBlockType>
            <AgentQuitFromTimeUp timeLimitMs="{MISSION_TIME_LIMIT_MS}"/>
        </AgentHandlers>
    </AgentSection>

</Mission>"#
    )
}
